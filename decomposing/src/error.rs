use thiserror::Error;

use crate::codepoint::Codepoint;

/// ошибка построения таблицы декомпозиции
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError
{
    /// сжатая таблица нарушает свою структуру. для встроенной таблицы это дефект данных, а не
    /// ошибка времени выполнения
    #[error("malformed decomposition table at index {position}: {reason}")]
    MalformedTable
    {
        /// позиция в сжатой таблице, где обнаружено нарушение
        position: usize,
        reason: Malformation,
    },
}

/// в чём именно нарушена структура сжатой таблицы
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation
{
    #[error("table ends without a terminator")]
    UnexpectedEnd,
    #[error("page marker 0x{0:X} is out of range")]
    PageOutOfRange(u16),
    #[error("character offset 0x{0:X} is out of range")]
    OffsetOutOfRange(u16),
    #[error("decomposition of {0} exceeds the maximum length")]
    DecompositionTooLong(Codepoint),
}

impl BuildError
{
    pub(crate) fn malformed(position: usize, reason: Malformation) -> Self
    {
        Self::MalformedTable { position, reason }
    }

    /// причина нарушения
    pub fn reason(&self) -> Malformation
    {
        match self {
            Self::MalformedTable { reason, .. } => *reason,
        }
    }
}
