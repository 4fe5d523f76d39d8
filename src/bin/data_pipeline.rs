//! Data processing demo: a queue of people drained by a small pool of
//! greeting workers.

use std::time::Duration;

use rideshare::pipeline::{Person, WorkerPool};

const NUM_WORKERS: usize = 3;
const NUM_PEOPLE: usize = 10;
const PROCESSING_DELAY: Duration = Duration::from_millis(200);

fn main() {
    println!("=== Data Processing System Starting ===");
    println!("Initializing queue with {NUM_PEOPLE} people");
    println!("Creating {NUM_WORKERS} worker threads\n");

    let people: Vec<Person> = (1..=NUM_PEOPLE)
        .map(|i| Person::new(format!("Person {i}")))
        .collect();

    let pool = WorkerPool::new(NUM_WORKERS)
        .expect("worker count is non-zero")
        .with_delay(PROCESSING_DELAY);
    let report = pool.run(people);

    println!("\n=== All workers completed ===");
    for (i, count) in report.worker_counts().iter().enumerate() {
        println!("Worker {} processed {} people", i + 1, count);
    }
    println!(
        "Data Processing System finished successfully ({} people greeted)",
        report.total()
    );
}
