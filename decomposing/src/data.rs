/// сжатая таблица канонических декомпозиций HFS+ (TN1150).
///
/// страница, затем символы этой страницы, у каждого - его декомпозиция, завершённая нулём;
/// список символов страницы завершается нулём, таблица - ещё одним нулём.
/// номера страниц и символов строго возрастают
pub fn compact() -> &'static [u16]
{
    COMPACT
}

static COMPACT: &[u16] = include!("./../../data/hfsplus.rs.txt");
