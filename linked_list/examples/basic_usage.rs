use linked_list::{LinkedList, List, ListError};

fn main() {
    println!("=== Linked List Examples ===\n");

    // Example 1: Working at both ends
    let _ = example_ends();

    // Example 2: Cursor checks on next, not has_next
    example_cursor();
}

fn example_ends() -> Result<(), ListError> {
    println!("Example 1: Adding and removing at both ends");

    let mut list = LinkedList::new();
    list.add_last(1);
    list.add_last(2);
    list.add_first(0);
    println!("  {:?}", list);
    println!("  first {} last {} middle {}", list.get_first()?, list.get_last()?, list.get(1)?);

    let removed = list.remove_last()?;
    println!("  removed {} -> {:?}", removed, list);

    list.clear();
    if let Err(err) = list.remove_first() {
        println!("  after clear: {}", err);
    }
    println!();

    Ok(())
}

fn example_cursor() {
    println!("Example 2: Cursor over a list that changes");

    let mut list: LinkedList<&str> = ["alpha", "beta"].into_iter().collect();
    let mut cursor = list.cursor();

    if let Ok(first) = cursor.next(&list) {
        println!("  first: {}", first);
    }

    list.sort();

    println!("  has_next: {}", cursor.has_next());
    match cursor.next(&list) {
        Ok(value) => println!("  unexpected: {}", value),
        Err(err) => println!("  cursor stopped: {}", err),
    }
}
