use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::DecomposingNormalizer;

mod group;

group!(
    "./../test_data/texts",
    texts,
    "decompose",
    "icu",
    {
        let nfd = DecomposingNormalizer::new_nfd();
        move |text: &str| nfd.normalize(text)
    }
);

criterion_group!(benches, texts);
criterion_main!(benches);
