//! A shared work queue drained by a fixed pool of worker threads.
//!
//! The queue is a bounded crossbeam channel; closing the sending side is the
//! completion signal, so workers simply drain until the channel is empty and
//! disconnected. Results flow back over a second channel and are collected
//! before the pool joins its threads.

use std::thread;
use std::time::Duration;

use crossbeam::channel;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("worker count must be at least 1")]
    NoWorkers,
}

/// A unit of work: someone to greet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One processed task: which worker greeted whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub worker: usize,
    pub person: String,
}

/// What a pool run produced: every greeting in completion order, plus how
/// many tasks each worker handled.
#[derive(Debug, Default)]
pub struct PipelineReport {
    greetings: Vec<Greeting>,
    worker_counts: Vec<usize>,
}

impl PipelineReport {
    pub fn total(&self) -> usize {
        self.greetings.len()
    }

    pub fn greetings(&self) -> &[Greeting] {
        &self.greetings
    }

    /// Tasks handled per worker, indexed by worker id minus one.
    pub fn worker_counts(&self) -> &[usize] {
        &self.worker_counts
    }
}

/// Fixed-size pool of greeting workers.
#[derive(Debug)]
pub struct WorkerPool {
    workers: usize,
    delay: Duration,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, PipelineError> {
        if workers == 0 {
            return Err(PipelineError::NoWorkers);
        }
        Ok(Self {
            workers,
            delay: Duration::ZERO,
        })
    }

    /// Per-task delay simulating real processing work.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queue every person, drain the queue across the pool, and collect the
    /// results. Returns once every worker has finished.
    pub fn run(&self, people: Vec<Person>) -> PipelineReport {
        let (task_tx, task_rx) = channel::bounded(people.len().max(1));
        for person in people {
            // capacity covers the whole batch, so this never blocks
            task_tx.send(person).expect("task receiver alive");
        }

        let (result_tx, result_rx) = channel::unbounded();
        let mut handles = Vec::with_capacity(self.workers);

        for worker_id in 1..=self.workers {
            let tasks = task_rx.clone();
            let results = result_tx.clone();
            let delay = self.delay;

            handles.push(thread::spawn(move || {
                println!("Worker {worker_id} started");
                let mut processed = 0usize;

                for person in tasks.iter() {
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    println!("Worker {worker_id} greets {}", person.name());
                    let _ = results.send(Greeting {
                        worker: worker_id,
                        person: person.name().to_string(),
                    });
                    processed += 1;
                }

                println!("Worker {worker_id} completed all tasks");
                processed
            }));
        }

        // closing the queue tells the workers no more tasks are coming
        drop(task_tx);
        drop(result_tx);

        let greetings: Vec<Greeting> = result_rx.iter().collect();
        let worker_counts: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(0))
            .collect();

        PipelineReport {
            greetings,
            worker_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn people(n: usize) -> Vec<Person> {
        (1..=n).map(|i| Person::new(format!("Person {i}"))).collect()
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert_eq!(WorkerPool::new(0).unwrap_err(), PipelineError::NoWorkers);
    }

    #[test]
    fn test_every_person_greeted_exactly_once() {
        let pool = WorkerPool::new(3).unwrap();
        let report = pool.run(people(10));

        assert_eq!(report.total(), 10);
        let greeted: HashSet<&str> = report
            .greetings()
            .iter()
            .map(|g| g.person.as_str())
            .collect();
        assert_eq!(greeted.len(), 10);
        assert!(greeted.contains("Person 1"));
        assert!(greeted.contains("Person 10"));
    }

    #[test]
    fn test_worker_counts_sum_to_task_count() {
        let pool = WorkerPool::new(4).unwrap();
        let report = pool.run(people(25));

        assert_eq!(report.worker_counts().len(), 4);
        assert_eq!(report.worker_counts().iter().sum::<usize>(), 25);
    }

    #[test]
    fn test_single_worker_keeps_queue_order() {
        let pool = WorkerPool::new(1).unwrap();
        let report = pool.run(people(5));

        let names: Vec<&str> = report
            .greetings()
            .iter()
            .map(|g| g.person.as_str())
            .collect();
        assert_eq!(
            names,
            ["Person 1", "Person 2", "Person 3", "Person 4", "Person 5"]
        );
        assert!(report.greetings().iter().all(|g| g.worker == 1));
    }

    #[test]
    fn test_empty_input_completes() {
        let pool = WorkerPool::new(3).unwrap();
        let report = pool.run(Vec::new());
        assert_eq!(report.total(), 0);
        assert_eq!(report.worker_counts(), &[0, 0, 0]);
    }

    #[test]
    fn test_more_workers_than_tasks() {
        let pool = WorkerPool::new(8).unwrap();
        let report = pool.run(people(3));
        assert_eq!(report.total(), 3);
        assert_eq!(report.worker_counts().iter().sum::<usize>(), 3);
    }
}
