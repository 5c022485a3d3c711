#![allow(dead_code)]

use profview::environment::device::DeviceProps;
use profview::model::comm::{CommOpStats, CommOverlapCosts, StepCommStats};
use profview::model::cost::CostBreakdown;
use profview::model::kernel::{KernelAggByNameOp, KernelStat};
use profview::model::operator::OperatorAgg;
use profview::WorkerProfileData;

pub fn step_costs(kernel: f64, runtime: f64, data_loader: f64, cpu_op: f64, other: f64) -> CostBreakdown {
    CostBreakdown {
        kernel,
        runtime,
        data_loader,
        cpu_op,
        other,
        ..Default::default()
    }
}

pub fn op(name: &str, host: f64, self_host: f64, device: f64, self_device: f64) -> OperatorAgg {
    OperatorAgg {
        name: name.to_string(),
        calls: 1,
        host_duration: host,
        self_host_duration: self_host,
        device_duration: device,
        self_device_duration: self_device,
        ..Default::default()
    }
}

pub fn op_with_shape(name: &str, shape: &str, self_host: f64) -> OperatorAgg {
    OperatorAgg {
        input_shape: Some(shape.to_string()),
        ..op(name, self_host, self_host, 0.0, 0.0)
    }
}

/// Two steps of a GPU worker with a handful of operators and kernels.
pub fn gpu_worker() -> WorkerProfileData {
    let steps_costs = vec![
        step_costs(10.0, 5.0, 2.0, 8.0, 1.0),
        step_costs(20.0, 10.0, 4.0, 16.0, 2.0),
    ];
    let conv = OperatorAgg {
        calls: 4,
        call_stacks: vec!["model.py(12): forward".to_string()],
        ..op("aten::conv2d", 300.0, 40.0, 250.0, 10.0)
    };
    let mm = OperatorAgg {
        calls: 2,
        ..op("aten::mm", 120.0, 120.0, 90.0, 90.0)
    };
    let add = op("aten::add", 15.4, 15.4, 0.0, 0.0);
    let mut stack_lists_group_by_name = indexmap::IndexMap::new();
    stack_lists_group_by_name.insert("aten::conv2d".to_string(), vec![conv.clone()]);

    WorkerProfileData {
        has_runtime: true,
        has_kernel: true,
        steps_names: vec!["1".to_string(), "2".to_string()],
        avg_costs: CostBreakdown::mean_of(&steps_costs),
        steps_costs,
        op_list_groupby_name: vec![conv.clone(), mm.clone(), add.clone()],
        op_list_groupby_name_input: vec![
            OperatorAgg {
                input_shape: Some("[[8, 3, 224, 224]]".to_string()),
                ..conv
            },
            OperatorAgg {
                input_shape: Some("[[64, 64], [64, 64]]".to_string()),
                ..mm
            },
            OperatorAgg {
                input_shape: Some("[]".to_string()),
                ..add
            },
        ],
        stack_lists_group_by_name,
        kernel_list_groupby_name_op: vec![
            KernelAggByNameOp {
                name: "volta_sgemm".to_string(),
                op_name: "aten::mm".to_string(),
                calls: 2,
                total_duration: 90.0,
                avg_duration: 45.0,
                max_duration: 50.4,
                min_duration: 39.6,
            },
            KernelAggByNameOp {
                name: "implicit_convolve".to_string(),
                op_name: "aten::conv2d".to_string(),
                calls: 4,
                total_duration: 250.0,
                avg_duration: 62.5,
                max_duration: 70.0,
                min_duration: 55.0,
            },
        ],
        kernel_stat: vec![
            KernelStat {
                name: "implicit_convolve".to_string(),
                count: 4.0,
                sum: 250.0,
                mean: 62.5,
                max: 70.0,
                min: 55.0,
            },
            KernelStat {
                name: "volta_sgemm".to_string(),
                count: 2.0,
                sum: 90.0,
                mean: 45.0,
                max: 50.4,
                min: 39.6,
            },
        ],
        recommendations: vec!["Try a larger batch size.".to_string()],
        trace_file_path: Some("/logs/worker0.pt.trace.json".to_string()),
        ..Default::default()
    }
}

/// A CPU-only worker: no kernels, no device activity.
pub fn cpu_worker() -> WorkerProfileData {
    let steps_costs = vec![step_costs(0.0, 0.0, 3.0, 12.0, 1.0)];
    WorkerProfileData {
        steps_names: vec!["5".to_string()],
        avg_costs: CostBreakdown::mean_of(&steps_costs),
        steps_costs,
        op_list_groupby_name: vec![
            op("aten::relu", 3.0, 3.0, 0.0, 0.0),
            op("aten::linear", 9.0, 4.0, 0.0, 0.0),
        ],
        ..Default::default()
    }
}

pub fn v100() -> DeviceProps {
    DeviceProps {
        name: Some("Tesla V100-SXM2-16GB".to_string()),
        total_global_mem: Some(16945512448),
        compute_major: Some(7),
        compute_minor: Some(0),
    }
}

pub fn overlap(computation: f64, communication: f64, overlap: f64, other: f64) -> CommOverlapCosts {
    CommOverlapCosts {
        computation,
        communication,
        overlap,
        other,
    }
}

pub fn wait(total: f64, wait: f64) -> StepCommStats {
    StepCommStats { total, wait }
}

pub fn comm_op(calls: u64, total_size: f64, total_latency: f64, total_real: f64) -> CommOpStats {
    CommOpStats {
        calls,
        total_size,
        total_latency,
        total_real,
    }
}

/// A worker of a distributed job with one GPU and consistent communication
/// statistics for each of its steps.
pub fn dist_worker(steps: &[(&str, CommOverlapCosts, StepCommStats)]) -> WorkerProfileData {
    let mut data = WorkerProfileData {
        has_kernel: true,
        has_communication: true,
        device_props: vec![v100()],
        used_devices: vec![0],
        ..Default::default()
    };
    for (name, costs, stats) in steps {
        data.steps_names.push(name.to_string());
        data.steps_costs.push(CostBreakdown::default());
        data.comm_overlap_costs.push(costs.clone());
        data.step_comm_stats.insert(name.to_string(), stats.clone());
    }
    data.total_comm_stats
        .insert("nccl:all_reduce".to_string(), comm_op(4, 400.0, 80.0, 40.0));
    data
}
