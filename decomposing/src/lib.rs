//! канонические декомпозиции кодпоинтов для имён файлов HFS+.
//!
//! HFS+ хранит и сравнивает имена файлов в полностью разложенном виде. встроенная сжатая таблица
//! один раз разворачивается в двухуровневую [`LookupTable`], после чего она доступна только
//! на чтение из любого количества потоков.
//!
//! ```
//! let table = hfsplus_decomposing::build().unwrap();
//!
//! assert_eq!(table.page_count(), 16);
//! assert_eq!(hfsplus_decomposing::decompose(0x00C0).map(|d| d.as_slice()), Some(&[0x0041, 0x0300][..]));
//! assert!(hfsplus_decomposing::decompose(0x0041).is_none());
//! ```

use once_cell::sync::OnceCell;
use tracing::error;

pub use codepoint::Codepoint;
pub use decomposition::{Decomposition, MAX_DECOMPOSE_LEN};
pub use error::{BuildError, Malformation};
pub use table::{LookupTable, Page, PAGE_COUNT, PAGE_SIZE};

mod codepoint;
mod data;
mod decomposition;
mod error;
mod slice;
mod table;
mod utf16;

/// таблица, построенная по встроенным данным. заполняется ровно один раз
static TABLE: OnceCell<LookupTable> = OnceCell::new();

/// построить таблицу декомпозиции, если она ещё не построена.
///
/// повторные вызовы возвращают ту же таблицу; одновременные вызовы дожидаются единственного построения.
/// ошибка не запоминается - неполная таблица никогда не становится доступной
pub fn build() -> Result<&'static LookupTable, BuildError>
{
    TABLE.get_or_try_init(|| {
        LookupTable::from_compact(data::compact()).map_err(|e| {
            error!(error = %e, "embedded decomposition table is malformed");
            e
        })
    })
}

/// построенная таблица; при первом обращении строится.
///
/// встроенная таблица не может оказаться испорченной во время выполнения, поэтому ошибка построения здесь фатальна
#[inline]
pub fn table() -> &'static LookupTable
{
    match TABLE.get() {
        Some(table) => table,
        None => match build() {
            Ok(table) => table,
            Err(e) => panic!("{}", e),
        },
    }
}

/// встроенная сжатая таблица, из которой строится [`LookupTable`]
pub fn compact_table() -> &'static [u16]
{
    data::compact()
}

/// декомпозиция кодпоинта. `None` - декомпозиции нет, кодпоинт следует использовать как есть
#[inline]
pub fn decompose(code: u16) -> Option<&'static Decomposition>
{
    table().get(code)
}

/// разложить UTF-16 имя: кодпоинты с декомпозицией заменяются ей, остальные копируются
pub fn decompose_utf16(input: &[u16]) -> Vec<u16>
{
    table().decompose_utf16(input)
}

/// разложить строку, результат - UTF-16
pub fn decompose_str(input: &str) -> Vec<u16>
{
    table().decompose_str(input)
}

/// длина разложенного UTF-16 имени
pub fn decomposed_len(input: &[u16]) -> usize
{
    table().decomposed_len(input)
}

/// имя не требует декомпозиции
pub fn is_decomposed(input: &[u16]) -> bool
{
    table().is_decomposed(input)
}
