mod common;

use profview::{Generate, RunGenerator, RunProfileView};
use rayon::prelude::*;

use common::*;

#[test]
fn test_generate_workers_in_parallel() {
    let workers: Vec<(String, _)> = (0..16)
        .map(|i| {
            let data = if i % 2 == 0 { gpu_worker() } else { cpu_worker() };
            (format!("node{}/{}", i / 8, i), data)
        })
        .collect();

    let parallel: Vec<RunProfileView> = workers
        .par_iter()
        .map(|(worker, data)| RunGenerator::new(worker.as_str(), data).generate().unwrap())
        .collect();
    let sequential: Vec<RunProfileView> = workers
        .iter()
        .map(|(worker, data)| RunGenerator::new(worker.as_str(), data).generate().unwrap())
        .collect();

    assert_eq!(parallel, sequential);
    assert_eq!(parallel[3].worker, "node0/3");
    assert!(parallel[0].kernel_table.is_some());
    assert!(parallel[1].kernel_table.is_none());
}
