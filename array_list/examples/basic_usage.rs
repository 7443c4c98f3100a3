use array_list::{ArrayList, List, ListError};

fn main() {
    println!("=== Array List Examples ===\n");

    // Example 1: Growth and sorting
    let _ = example_growth();

    // Example 2: Fail-fast cursor
    example_cursor();
}

fn example_growth() -> Result<(), ListError> {
    println!("Example 1: Growing from two slots");

    let mut list = ArrayList::with_capacity(2);
    list.add(5);
    list.add(3);
    println!("  {:?} capacity {}", list, list.capacity());

    list.add(9);
    println!("  {:?} capacity {}", list, list.capacity());

    list.sort();
    println!("  sorted: {:?}", list);

    let removed = list.remove(0)?;
    println!("  removed {} -> {:?}", removed, list);
    println!();

    Ok(())
}

fn example_cursor() {
    println!("Example 2: Cursor invalidated by a mutation");

    let mut list: ArrayList<&str> = ["alpha", "beta"].into_iter().collect();
    let mut cursor = list.cursor();

    if let Ok(first) = cursor.next(&list) {
        println!("  first: {}", first);
    }

    list.add("gamma");

    match cursor.next(&list) {
        Ok(value) => println!("  unexpected: {}", value),
        Err(err) => println!("  cursor stopped: {}", err),
    }
}
