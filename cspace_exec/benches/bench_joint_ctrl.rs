//! # Joint Control Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cspace_lib::{
    device::AxisSample,
    joint_ctrl::{integrate, InputData, JointCtrl, JointState, Params},
    scene::{self, StaticScene},
};
use util::module::State;

fn joint_ctrl_benchmark(c: &mut Criterion) {
    // ---- Build the module ----

    let params = Params::default();

    let mut joint_ctrl = JointCtrl::default();
    joint_ctrl.init(params.clone(), None).unwrap();

    // A full sweep of the stick X axis with a fixed Y deflection
    let samples: Vec<AxisSample> = (-128..=127)
        .map(|lx| AxisSample { lx, ly: -50 })
        .collect();

    // ---- Run benchmarks ----

    c.bench_function("JointCtrl::proc sweep", |b| {
        b.iter(|| {
            let mut joints = JointState::default();

            for sample in &samples {
                let (j, _) = joint_ctrl
                    .proc(&InputData {
                        joints,
                        sample: *sample,
                    })
                    .unwrap();
                joints = j;
            }

            black_box(joints)
        })
    });

    c.bench_function("integrate near boundary", |b| {
        let prev = JointState {
            theta1_rad: std::f64::consts::TAU - 1e-9,
            theta2_rad: -std::f64::consts::TAU,
        };

        b.iter(|| integrate(black_box(prev), black_box(AxisSample { lx: 127, ly: 127 }), &params))
    });

    c.bench_function("StaticScene::build", |b| {
        let scene_params = scene::Params::default();

        b.iter(|| StaticScene::build(black_box(&scene_params)).unwrap())
    });
}

criterion_group!(benches, joint_ctrl_benchmark);
criterion_main!(benches);
