/// Ascending positions of the set bits of a [`crate::BitKey`].
///
/// Each word is drained by clearing its lowest set bit, so the cost is
/// proportional to the number of words plus the number of set bits.
#[derive(Clone, Debug)]
pub struct SetBits<'a> {
    words: &'a [u64],
    word: usize,
    cur: u64,
}

impl<'a> SetBits<'a> {
    pub(crate) fn new(words: &'a [u64]) -> Self {
        SetBits {
            words,
            word: 0,
            cur: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.cur != 0 {
                let bit = self.cur.trailing_zeros() as usize;
                self.cur &= self.cur - 1;
                return Some(self.word * 64 + bit);
            }
            if self.word + 1 >= self.words.len() {
                return None;
            }
            self.word += 1;
            self.cur = self.words[self.word];
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest: usize = self
            .words
            .get(self.word + 1..)
            .map_or(0, |ws| ws.iter().map(|w| w.count_ones() as usize).sum());
        let n = self.cur.count_ones() as usize + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits<'_> {}

impl std::iter::FusedIterator for SetBits<'_> {}
