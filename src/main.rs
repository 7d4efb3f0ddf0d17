extern crate classic_collections;

use classic_collections::hash::{HashTable, Strategy, DEFAULT_TABLE_SIZE};
use classic_collections::linked_list::LinkedList;
use classic_collections::session::Session;
use classic_collections::skiplist::SkipList;
use classic_collections::tree::Algorithm;
use std::process;

fn run() -> classic_collections::Result<()> {
    let mut session = Session::new(&mut rand::thread_rng());
    let values = session.values().to_vec();
    println!("values: {:?}", values);

    for algorithm in &Algorithm::ALL {
        session.set_algorithm(*algorithm);
        let data = session.tree_data()?;
        let nodes = data.tree.as_ref().map_or(0, |tree| tree.len());
        println!("{}: {} nodes, hash {}", algorithm.label(), nodes, data.hash);
    }

    let mut list = LinkedList::new();
    for value in &values {
        list.insert(*value);
    }
    if let Some(&last) = values.last() {
        let result = list.search(last, true, false);
        println!("linked list: found {} at {:?}, now {:?}", last, result.index, list.to_vec());
    }

    let mut skiplist = SkipList::new();
    for value in &values {
        skiplist.insert(*value);
    }
    println!("skip list: {:?}", skiplist.to_vec());

    let mut table = HashTable::new(DEFAULT_TABLE_SIZE, Strategy::Double)?;
    for (key, result) in values.iter().zip(table.insert_all(&values)) {
        match result {
            Ok(slot) => println!("hash: {} -> {:?}", key, slot),
            Err(err) => println!("hash: {} rejected: {}", key, err),
        }
    }

    print!("{}", session.benchmark());
    println!("share: {}", session.share_url("http://localhost")?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
