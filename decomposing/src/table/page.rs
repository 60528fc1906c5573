use crate::decomposition::Decomposition;

/// количество кодпоинтов на странице
pub const PAGE_SIZE: usize = 256;

/// страница: декомпозиции 256 кодпоинтов с общим старшим байтом
#[derive(Clone, PartialEq, Eq)]
pub struct Page
{
    entries: [Decomposition; PAGE_SIZE],
}

impl Page
{
    /// страница, на которой ни у одного кодпоинта нет декомпозиции
    pub fn new() -> Box<Self>
    {
        Box::new(Self {
            entries: [Decomposition::EMPTY; PAGE_SIZE],
        })
    }

    #[inline(always)]
    pub fn get(&self, offset: u8) -> &Decomposition
    {
        &self.entries[offset as usize]
    }

    #[inline(always)]
    pub(crate) fn entry_mut(&mut self, offset: u8) -> &mut Decomposition
    {
        &mut self.entries[offset as usize]
    }

    /// непустые записи страницы вместе со смещениями, по возрастанию смещения
    pub fn entries(&self) -> impl Iterator<Item = (u8, &Decomposition)>
    {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_empty())
            .map(|(offset, entry)| (offset as u8, entry))
    }
}

impl core::fmt::Debug for Page
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_map().entries(self.entries()).finish()
    }
}
