/// 16-битный кодпоинт, разбиваемый на страницу (старший байт) и смещение внутри неё (младший байт)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u16);

impl From<u16> for Codepoint
{
    #[inline(always)]
    fn from(code: u16) -> Self
    {
        Self(code)
    }
}

impl From<Codepoint> for u16
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        value.0
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "U+{:04X}", self.0)
    }
}

impl core::fmt::Display for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Codepoint
{
    /// собрать кодпоинт из номера страницы и смещения
    #[inline(always)]
    pub const fn from_parts(page: u8, offset: u8) -> Self
    {
        Self((page as u16) << 8 | offset as u16)
    }

    #[inline(always)]
    pub const fn code(&self) -> u16
    {
        self.0
    }

    /// страница - старший байт
    #[inline(always)]
    pub const fn page(&self) -> u8
    {
        (self.0 >> 8) as u8
    }

    /// смещение внутри страницы - младший байт
    #[inline(always)]
    pub const fn offset(&self) -> u8
    {
        self.0 as u8
    }
}
