use std::fmt;

use crate::construct_word;
use crate::runtime::error::{LoadError, Skip};
use crate::runtime::opcode::Op;
use crate::runtime::word::{MEMORY_SIZE, Word};

/// The flat, self-modifiable word array.
///
/// Cells are raw 16-bit units: a program may store any word, including
/// operand encodings that will fail to resolve.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[Word]>,
}

impl Memory {
    /// Fresh memory with every cell set to `noop`.
    pub fn new() -> Self {
        Self {
            cells: vec![Word::from(Op::NOOP); MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn reset(&mut self) {
        self.cells.fill(Word::from(Op::NOOP));
    }

    /// Decodes `image` as little-endian word pairs and stores them from address 0.
    ///
    /// A trailing odd byte is dropped. Cells past the end of the image keep
    /// their previous contents. Returns the number of words written.
    pub fn load(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        let words = image.len() / 2;
        if words > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                words,
                capacity: MEMORY_SIZE,
            });
        }

        if image.len() % 2 != 0 {
            log::warn!("image has an odd length ({} bytes), dropping the last byte", image.len());
        }

        for (cell, pair) in self.cells.iter_mut().zip(image.chunks_exact(2)) {
            *cell = construct_word!(pair);
        }

        Ok(words)
    }

    /// Stores `words` from address 0.
    pub fn load_words(&mut self, words: &[Word]) -> Result<(), LoadError> {
        if words.len() > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                words: words.len(),
                capacity: MEMORY_SIZE,
            });
        }

        self.cells[..words.len()].copy_from_slice(words);
        Ok(())
    }

    pub fn read(&self, addr: Word) -> Result<Word, Skip> {
        self.cells
            .get(addr as usize)
            .copied()
            .ok_or(Skip::AddressOutOfRange { addr })
    }

    pub fn write(&mut self, addr: Word, value: Word) -> Result<(), Skip> {
        let cell = self
            .cells
            .get_mut(addr as usize)
            .ok_or(Skip::AddressOutOfRange { addr })?;
        *cell = value;
        Ok(())
    }

    pub fn contains(addr: Word) -> bool {
        (addr as usize) < MEMORY_SIZE
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self
            .cells
            .iter()
            .rposition(|&cell| cell != Word::from(Op::NOOP))
            .map_or(0, |last| last + 1);
        f.debug_struct("Memory")
            .field("cells", &self.cells.len())
            .field("head", &&self.cells[..used.min(16)])
            .finish()
    }
}
