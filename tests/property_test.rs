use indexmap::IndexMap;
use profview::model::comm::{CommOverlapCosts, StepCommStats};
use profview::model::cost::CostBreakdown;
use profview::model::operator::OperatorAgg;
use profview::view::run::OperatorPies;
use profview::view::PieDataset;
use profview::{DistributedRunGenerator, Generate, RunGenerator, WorkerProfileData};
use proptest::prelude::*;

fn arb_operator() -> impl Strategy<Value = OperatorAgg> {
    (
        "[a-z]{1,6}",
        0u64..50,
        prop_oneof![Just(0.0), 0.0f64..1e4],
        prop_oneof![Just(0.0), 0.0f64..1e4],
        prop_oneof![Just(0.0), 0.0f64..1e4],
        prop_oneof![Just(0.0), 0.0f64..1e4],
    )
        .prop_map(|(name, calls, host, self_host, device, self_device)| OperatorAgg {
            name: format!("aten::{}", name),
            calls,
            host_duration: host,
            self_host_duration: self_host,
            device_duration: device,
            self_device_duration: self_device,
            ..Default::default()
        })
}

fn arb_costs() -> impl Strategy<Value = CostBreakdown> {
    prop::array::uniform8(0.0f64..1e5).prop_map(|b| CostBreakdown {
        kernel: b[0],
        memcpy: b[1],
        memset: b[2],
        communication: b[3],
        runtime: b[4],
        data_loader: b[5],
        cpu_op: b[6],
        other: b[7],
    })
}

fn arb_overlap() -> impl Strategy<Value = CommOverlapCosts> {
    (0.0f64..1e4, 0.0f64..1e4, 0.0f64..=1.0, 0.0f64..1e3).prop_map(|(comp, comm, frac, other)| {
        CommOverlapCosts {
            computation: comp,
            communication: comm,
            overlap: comp.min(comm) * frac,
            other,
        }
    })
}

/// Pie rows must be exactly the positive entries, largest first.
fn check_pie(pie: &Option<PieDataset>, ops: &[OperatorAgg], value: fn(&OperatorAgg) -> f64) {
    let positive: Vec<&OperatorAgg> = ops.iter().filter(|op| value(op) > 0.0).collect();
    match pie {
        None => assert!(positive.is_empty()),
        Some(pie) => {
            assert_eq!(pie.rows.len(), positive.len());
            let mut seen = pie.rows.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>();
            let mut expected = positive.iter().map(|op| op.name.clone()).collect::<Vec<_>>();
            seen.sort();
            expected.sort();
            assert_eq!(seen, expected);
            for pair in pie.rows.windows(2) {
                assert!(pair[0].1 >= pair[1].1);
            }
        }
    }
}

fn check_pies(pies: &OperatorPies, ops: &[OperatorAgg]) {
    check_pie(&pies.device_total_time, ops, |op| op.device_duration);
    check_pie(&pies.device_self_time, ops, |op| op.self_device_duration);
    check_pie(&pies.host_total_time, ops, |op| op.host_duration);
    check_pie(&pies.host_self_time, ops, |op| op.self_host_duration);
}

proptest! {
    #[test]
    fn prop_op_pies_hold_positive_operators_descending(ops in prop::collection::vec(arb_operator(), 0..20)) {
        let data = WorkerProfileData {
            has_kernel: true,
            op_list_groupby_name: ops.clone(),
            ..Default::default()
        };
        let view = RunGenerator::new("w", &data).generate().unwrap();
        check_pies(&view.operation_pie_by_name, &ops);
    }

    #[test]
    fn prop_generation_is_idempotent(
        ops in prop::collection::vec(arb_operator(), 0..10),
        steps in prop::collection::vec(arb_costs(), 0..5),
    ) {
        let data = WorkerProfileData {
            has_runtime: true,
            steps_names: (0..steps.len()).map(|i| i.to_string()).collect(),
            avg_costs: CostBreakdown::mean_of(&steps),
            steps_costs: steps,
            op_list_groupby_name: ops,
            ..Default::default()
        };
        let generator = RunGenerator::new("w", &data);
        prop_assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
    }

    #[test]
    fn prop_overview_percentages_sum_to_100(steps in prop::collection::vec(arb_costs(), 1..4)) {
        let avg = CostBreakdown::mean_of(&steps);
        prop_assume!(avg.total() > 1.0);
        let data = WorkerProfileData {
            has_kernel: true,
            avg_costs: avg,
            ..Default::default()
        };
        let view = RunGenerator::new("w", &data).generate().unwrap();
        let children = view.overview.performance[0].children.clone().unwrap();
        let sum: f64 = children.iter().map(|c| c.extra).sum();
        prop_assert!((sum - 100.0).abs() <= 0.005 * children.len() as f64 + 1e-9);
    }

    #[test]
    fn prop_all_step_is_unweighted_mean(
        overlaps in prop::collection::vec(arb_overlap(), 1..6),
        waits in prop::collection::vec((0.0f64..1e4, 0.0f64..=1.0), 1..6),
    ) {
        let mut data = WorkerProfileData::default();
        for (i, costs) in overlaps.iter().enumerate() {
            data.steps_names.push(i.to_string());
            data.comm_overlap_costs.push(costs.clone());
        }
        for (i, (total, frac)) in waits.iter().enumerate() {
            data.step_comm_stats.insert(i.to_string(), StepCommStats { total: *total, wait: total * frac });
        }
        let mut workers = IndexMap::new();
        workers.insert("n/0".to_string(), data);
        let view = DistributedRunGenerator::new(&workers).generate().unwrap();

        let overlap_data = view.steps_to_overlap.unwrap().data;
        let n = overlaps.len() as f64;
        let all = overlap_data["all"]["n/0"];
        for k in 0..4 {
            let mean: f64 = overlap_data
                .iter()
                .filter(|(step, _)| step.as_str() != "all")
                .map(|(_, w)| w["n/0"][k])
                .sum::<f64>() / n;
            prop_assert!((all[k] - mean).abs() <= 1e-6 * (1.0 + mean.abs()));
        }
        for v in overlap_data.values().flat_map(|w| w.values()) {
            prop_assert!(v.iter().all(|x| *x >= 0.0));
        }

        let wait_data = view.steps_to_wait.unwrap().data;
        let n = waits.len() as f64;
        let all = wait_data["all"]["n/0"];
        for k in 0..2 {
            let mean: f64 = wait_data
                .iter()
                .filter(|(step, _)| step.as_str() != "all")
                .map(|(_, w)| w["n/0"][k])
                .sum::<f64>() / n;
            prop_assert!((all[k] - mean).abs() <= 1e-6 * (1.0 + mean.abs()));
        }
    }
}
