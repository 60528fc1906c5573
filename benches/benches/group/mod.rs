pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// сколько раз повторяем текст, чтобы замер не был слишком коротким
pub const TEXT_REPEAT: usize = 16;

#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $group: expr, $name: expr, $decompose: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let decompose = $decompose;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::read_dir($dir) {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    text.as_str(),
                    |b, text| b.iter(|| decompose(criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами: (название, текст), по алфавиту
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            let text = std::fs::read_to_string(&path).unwrap();

            (name, text.repeat(TEXT_REPEAT))
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}
