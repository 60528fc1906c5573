//! разворачивание сжатой таблицы в двухуровневую.
//!
//! формат сжатой таблицы - одна последовательность u16:
//!
//! ```text
//! страница, (символ, кодпоинт.., 0)*, 0,
//! страница, (символ, кодпоинт.., 0)*, 0,
//! ...
//! 0
//! ```
//!
//! номера страниц строго возрастают, номера символов на странице - тоже. поэтому значение,
//! не превышающее предыдущее на своём уровне, означает конец списка: для символов это завершающий
//! страницу 0 (он поглощается), для страниц - 0 в конце всей таблицы.

use tracing::debug;

use super::LookupTable;
use crate::codepoint::Codepoint;
use crate::error::{BuildError, Malformation};
use crate::slice::cursor::Cursor;

/// построить таблицу по сжатым данным
pub fn build(source: &[u16]) -> Result<LookupTable, BuildError>
{
    let mut table = LookupTable::empty();
    let mut cursor = Cursor::new(source);

    let mut last_page: i32 = -1;

    loop {
        let page = cursor.peek()?;

        if i32::from(page) <= last_page {
            break;
        }

        let page_position = cursor.position();
        cursor.advance();

        let page_index = match u8::try_from(page) {
            Ok(index) => index,
            Err(_) => {
                return Err(BuildError::malformed(
                    page_position,
                    Malformation::PageOutOfRange(page),
                ))
            }
        };

        last_page = i32::from(page);

        read_page(&mut cursor, &mut table, page_index)?;
    }

    debug!(
        pages = table.page_count(),
        entries = table.entry_count(),
        consumed = cursor.position(),
        "decomposition table built"
    );

    Ok(table)
}

/// прочитать символы страницы вместе с завершающим её значением
fn read_page(
    cursor: &mut Cursor,
    table: &mut LookupTable,
    page_index: u8,
) -> Result<(), BuildError>
{
    let page = table.page_mut(page_index);
    let mut last_char: i32 = -1;

    loop {
        let char_position = cursor.position();
        let character = cursor.read()?;

        if i32::from(character) <= last_char {
            return Ok(());
        }

        let offset = match u8::try_from(character) {
            Ok(offset) => offset,
            Err(_) => {
                return Err(BuildError::malformed(
                    char_position,
                    Malformation::OffsetOutOfRange(character),
                ))
            }
        };

        last_char = i32::from(character);

        let entry = page.entry_mut(offset);

        loop {
            let position = cursor.position();
            let code = cursor.read()?;

            if code == 0 {
                break;
            }

            if entry.push(code).is_err() {
                return Err(BuildError::malformed(
                    position,
                    Malformation::DecompositionTooLong(Codepoint::from_parts(page_index, offset)),
                ));
            }
        }
    }
}
