criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        encoding_random_spot,
        resolving_illegal_choice,
}

use croupier::Arbitrary;
use croupier::env::encoder::Encoding;
use croupier::env::resolver::resolve;
use croupier::gameplay::action::Action;
use croupier::gameplay::spot::Spot;

fn encoding_random_spot(c: &mut criterion::Criterion) {
    let spot = Spot::random();
    c.bench_function("encode a Spot observation", |b| {
        b.iter(|| Encoding::try_from(&spot))
    });
}

fn resolving_illegal_choice(c: &mut criterion::Criterion) {
    let legal = vec![Action::Check, Action::Fold];
    let choice = u8::from(Action::Raise) as usize;
    c.bench_function("resolve an illegal choice", |b| {
        b.iter(|| resolve(choice, &legal))
    });
}
