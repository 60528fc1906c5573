use std::fs;

use tracing_subscriber::filter::LevelFilter;

/// папка с текстами на разных языках
const TEXTS_DIR: &str = "./../test_data/texts";

/// тексты для тестов: (название, текст), по алфавиту
pub fn texts() -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir(TEXTS_DIR)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();

            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// строка в UTF-16
pub fn utf16(source: &str) -> Vec<u16>
{
    source.encode_utf16().collect()
}

/// вывод событий tracing в тестах; повторная инициализация игнорируется
pub fn init_logging()
{
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
