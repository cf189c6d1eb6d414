// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Update Cycle Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for a full perception → semantic memory cycle.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cogxel_core::{
    ArrayInput, ArrayPerceptionFactory, CognitiveModel, CognitiveModelFactory, ModelInput,
    RecordingListener, SemanticMemoryFactory,
};
use cogxel_memory::AssociationNetwork;
use cogxel_types::{ModelConfig, SemanticLabel};

fn make_model(n_inputs: usize, n_outputs: usize) -> (CognitiveModel, Arc<dyn ModelInput>) {
    let mut factory = CognitiveModelFactory::new(ModelConfig::default()).unwrap();
    let mut network = AssociationNetwork::new(Arc::clone(factory.registry()));
    let inputs: Vec<SemanticLabel> = (0..n_inputs)
        .map(|i| SemanticLabel::new(format!("in-{i}")).unwrap())
        .collect();
    for (i, input) in inputs.iter().enumerate() {
        for k in 0..4 {
            let output = SemanticLabel::new(format!("out-{}", (i + k * 3) % n_outputs)).unwrap();
            network.set_association(input, &output, 0.25).unwrap();
        }
    }
    factory
        .add_module_factory(Some(Arc::new(ArrayPerceptionFactory)))
        .unwrap();
    factory
        .add_module_factory(Some(Arc::new(SemanticMemoryFactory::new(Arc::new(network)))))
        .unwrap();

    let values = (0..n_inputs).map(|i| (i % 5) as f64 * 0.2).collect();
    let input: Arc<dyn ModelInput> =
        Arc::new(ArrayInput::from_labels(factory.registry(), &inputs, values).unwrap());
    (factory.create_model().unwrap(), input)
}

// ── CognitiveModel.update() ─────────────────────────────────────────

fn bench_cycle_small(c: &mut Criterion) {
    let (mut model, input) = make_model(16, 8);
    c.bench_function("cycle_16in", |b| {
        b.iter(|| model.update(Some(Arc::clone(black_box(&input)))).unwrap())
    });
}

fn bench_cycle_large(c: &mut Criterion) {
    let (mut model, input) = make_model(1000, 250);
    c.bench_function("cycle_1000in", |b| {
        b.iter(|| model.update(Some(Arc::clone(black_box(&input)))).unwrap())
    });
}

fn bench_cycle_with_listener(c: &mut Criterion) {
    let (mut model, input) = make_model(16, 8);
    model.add_listener(Some(Arc::new(RecordingListener::new(16))));
    c.bench_function("cycle_16in_recording", |b| {
        b.iter(|| model.update(Some(Arc::clone(black_box(&input)))).unwrap())
    });
}

criterion_group!(
    benches,
    bench_cycle_small,
    bench_cycle_large,
    bench_cycle_with_listener,
);
criterion_main!(benches);
