use crate::error::{BuildError, Malformation};

/// курсор по сжатой таблице: читает только вперёд, каждое чтение проверяется на выход за границу
pub struct Cursor<'a>
{
    data: &'a [u16],
    position: usize,
}

impl<'a> Cursor<'a>
{
    #[inline]
    pub fn new(data: &'a [u16]) -> Self
    {
        Self { data, position: 0 }
    }

    /// текущее значение без сдвига курсора
    #[inline]
    pub fn peek(&self) -> Result<u16, BuildError>
    {
        match self.data.get(self.position) {
            Some(value) => Ok(*value),
            None => Err(BuildError::malformed(
                self.position,
                Malformation::UnexpectedEnd,
            )),
        }
    }

    /// прочитать значение и сдвинуть курсор
    #[inline]
    pub fn read(&mut self) -> Result<u16, BuildError>
    {
        let value = self.peek()?;
        self.position += 1;

        Ok(value)
    }

    /// пропустить уже просмотренное значение
    #[inline]
    pub fn advance(&mut self)
    {
        if self.position < self.data.len() {
            self.position += 1;
        }
    }

    /// позиция следующего значения
    #[inline(always)]
    pub fn position(&self) -> usize
    {
        self.position
    }
}
