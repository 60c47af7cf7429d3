use chain_map::{ChainMap, MapError};

fn main() -> Result<(), MapError> {
    tracing_subscriber::fmt::init();

    println!("Hash Map");
    let mut map = ChainMap::new();
    map.print();
    map.put("a", 2)?;
    map.put("d", 7)?;
    println!();
    map.print();
    map.put("a", 6)?;
    println!();
    map.print();
    map.put("g", 8)?;
    map.put("l", 9)?;
    println!();
    map.print();

    println!("\nPrint value of key, else print default value");
    println!("a = {}", map.get("a", -1));
    println!("m = {}", map.get("m", -1));

    println!("\nIterate");
    let iter = map.iter();
    for (_, key, value) in iter {
        println!("{key} = {value}");
    }

    map.destroy();
    Ok(())
}
