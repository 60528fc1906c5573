use crate::codepoint::Codepoint;
use crate::decomposition::Decomposition;
use crate::error::BuildError;

pub use page::{Page, PAGE_SIZE};

mod builder;
mod page;

/// количество страниц - все возможные значения старшего байта
pub const PAGE_COUNT: usize = 256;

/// двухуровневая таблица декомпозиции: страница по старшему байту кодпоинта,
/// запись на странице - по младшему. отсутствующая страница - ни у одного её кодпоинта нет декомпозиции
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable
{
    pages: [Option<Box<Page>>; PAGE_COUNT],
}

impl LookupTable
{
    /// таблица без единой страницы
    pub fn empty() -> Self
    {
        Self {
            pages: core::array::from_fn(|_| None),
        }
    }

    /// развернуть сжатую таблицу
    pub fn from_compact(source: &[u16]) -> Result<Self, BuildError>
    {
        builder::build(source)
    }

    /// декомпозиция кодпоинта, если она есть
    #[inline(always)]
    pub fn get(&self, code: u16) -> Option<&Decomposition>
    {
        let codepoint = Codepoint::from(code);

        let entry = self.pages[codepoint.page() as usize]
            .as_deref()?
            .get(codepoint.offset());

        match entry.is_empty() {
            true => None,
            false => Some(entry),
        }
    }

    /// страница по старшему байту
    #[inline]
    pub fn page(&self, index: u8) -> Option<&Page>
    {
        self.pages[index as usize].as_deref()
    }

    /// существующие страницы вместе с их номерами, по возрастанию
    pub fn pages(&self) -> impl Iterator<Item = (u8, &Page)>
    {
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(index, page)| page.as_deref().map(|page| (index as u8, page)))
    }

    pub fn page_count(&self) -> usize
    {
        self.pages().count()
    }

    /// все кодпоинты, имеющие декомпозицию, по возрастанию
    pub fn entries(&self) -> impl Iterator<Item = (Codepoint, &Decomposition)>
    {
        self.pages().flat_map(|(index, page)| {
            page.entries()
                .map(move |(offset, entry)| (Codepoint::from_parts(index, offset), entry))
        })
    }

    pub fn entry_count(&self) -> usize
    {
        self.entries().count()
    }

    /// страница для заполнения; если её ещё нет - создаём пустую
    pub(crate) fn page_mut(&mut self, index: u8) -> &mut Page
    {
        self.pages[index as usize].get_or_insert_with(Page::new)
    }
}

impl Default for LookupTable
{
    fn default() -> Self
    {
        Self::empty()
    }
}

impl core::fmt::Debug for LookupTable
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_map().entries(self.pages()).finish()
    }
}
