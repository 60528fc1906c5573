//! декомпозиция имён целиком. HFS+ хранит имена файлов в UTF-16, каждый кодпоинт
//! с декомпозицией заменяется ей (один уровень, без канонической перестановки),
//! остальные единицы, включая суррогаты, копируются как есть

use crate::LookupTable;

impl LookupTable
{
    /// разложить UTF-16 строку
    pub fn decompose_utf16(&self, input: &[u16]) -> Vec<u16>
    {
        let mut result = Vec::with_capacity(self.decomposed_len(input));

        for &code in input {
            match self.get(code) {
                Some(decomposition) => result.extend_from_slice(decomposition),
                None => result.push(code),
            }
        }

        result
    }

    /// разложить строку, результат - UTF-16
    pub fn decompose_str(&self, input: &str) -> Vec<u16>
    {
        let mut result = Vec::with_capacity(input.len());

        for code in input.encode_utf16() {
            match self.get(code) {
                Some(decomposition) => result.extend_from_slice(decomposition),
                None => result.push(code),
            }
        }

        result
    }

    /// длина результата декомпозиции в UTF-16 единицах
    pub fn decomposed_len(&self, input: &[u16]) -> usize
    {
        input
            .iter()
            .map(|&code| self.get(code).map_or(1, |d| d.len()))
            .sum()
    }

    /// строка уже разложена - ни у одной единицы нет декомпозиции
    pub fn is_decomposed(&self, input: &[u16]) -> bool
    {
        input.iter().all(|&code| self.get(code).is_none())
    }
}
