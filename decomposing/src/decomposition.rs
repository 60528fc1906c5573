use core::ops::Deref;

/// максимальная длина декомпозиции одного кодпоинта (самая длинная в таблице - U+1F82, 4 кодпоинта)
pub const MAX_DECOMPOSE_LEN: usize = 4;

/// декомпозиция кодпоинта: от 1 до MAX_DECOMPOSE_LEN кодпоинтов, пустая - декомпозиции нет.
///
/// за последним элементом всегда следует 0, поэтому запись можно отдать как есть
/// потребителю, который ищет конец последовательности по нулю (см. [`Decomposition::as_terminated`])
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition
{
    codes: [u16; MAX_DECOMPOSE_LEN + 1],
    len: u8,
}

impl Decomposition
{
    /// декомпозиции нет
    pub const EMPTY: Self = Self {
        codes: [0; MAX_DECOMPOSE_LEN + 1],
        len: 0,
    };

    /// дописать кодпоинт. если запись уже заполнена - возвращаем отвергнутый кодпоинт
    #[inline]
    pub(crate) fn push(&mut self, code: u16) -> Result<(), u16>
    {
        let len = self.len as usize;

        if len == MAX_DECOMPOSE_LEN {
            return Err(code);
        }

        self.codes[len] = code;
        self.len += 1;

        Ok(())
    }

    #[inline(always)]
    pub fn len(&self) -> usize
    {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u16]
    {
        &self.codes[.. self.len as usize]
    }

    /// декомпозиция вместе с завершающим нулём
    #[inline(always)]
    pub fn as_terminated(&self) -> &[u16]
    {
        &self.codes[..= self.len as usize]
    }
}

impl Default for Decomposition
{
    fn default() -> Self
    {
        Self::EMPTY
    }
}

impl Deref for Decomposition
{
    type Target = [u16];

    #[inline]
    fn deref(&self) -> &Self::Target
    {
        self.as_slice()
    }
}

impl core::fmt::Debug for Decomposition
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_list()
            .entries(self.as_slice().iter().map(|c| crate::Codepoint::from(*c)))
            .finish()
    }
}
