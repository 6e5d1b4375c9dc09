/// A growable bitset that counts bits in order from least-to-most
/// significant bits and ascending words. This is the interchange form
/// for sets of ordinals: key types with fixed capacities convert to and
/// from it.
///
/// Trailing zero words are not significant: two sets with the same bits
/// set compare and hash equal however many words each has allocated.
#[derive(Clone, Default)]
pub struct DenseBitSet {
    words: Vec<u64>,
}

impl DenseBitSet {
    pub fn new() -> Self {
        DenseBitSet { words: Vec::new() }
    }
    pub fn with_capacity(bits: usize) -> Self {
        DenseBitSet {
            words: vec![0; bits.div_ceil(64)],
        }
    }
    pub fn from_words(words: Vec<u64>) -> Self {
        DenseBitSet { words }
    }
    pub fn words(&self) -> &[u64] {
        &self.words
    }
    pub fn set(&mut self, i: usize, val: bool) {
        let w = i / 64;
        if val {
            if w >= self.words.len() {
                self.words.resize(w + 1, 0);
            }
            self.words[w] |= 1 << (i % 64);
        } else if w < self.words.len() {
            self.words[w] &= !(1 << (i % 64));
        }
    }
    pub fn get(&self, i: usize) -> bool {
        match self.words.get(i / 64) {
            Some(w) => (w & (1 << (i % 64))) != 0,
            None => false,
        }
    }
    /// One past the highest set bit, or 0 when no bit is set.
    pub fn len(&self) -> usize {
        match self.significant().last() {
            Some(w) => (self.significant().len() - 1) * 64 + (64 - w.leading_zeros() as usize),
            None => 0,
        }
    }
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }
    pub fn count(&self) -> usize {
        self.words.iter().map(|x| x.count_ones() as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|x| *x == 0)
    }
    pub fn union(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= *b;
        }
    }
    pub fn intersect(&mut self, other: &Self) {
        for (i, a) in self.words.iter_mut().enumerate() {
            *a &= other.words.get(i).copied().unwrap_or(0);
        }
    }
    pub fn subtract(&mut self, other: &Self) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= !*b;
        }
    }
    pub fn iter(&self) -> DenseBits<'_> {
        DenseBits {
            words: &self.words,
            word: 0,
            cur: self.words.first().copied().unwrap_or(0),
        }
    }

    fn significant(&self) -> &[u64] {
        let n = self.words.iter().rposition(|w| *w != 0).map_or(0, |i| i + 1);
        &self.words[..n]
    }
}

impl PartialEq for DenseBitSet {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}
impl Eq for DenseBitSet {}

impl std::hash::Hash for DenseBitSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.significant().hash(state)
    }
}

impl std::fmt::Debug for DenseBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for DenseBitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut bs = DenseBitSet::new();
        for i in iter {
            bs.set(i, true);
        }
        bs
    }
}

/// Ascending positions of the set bits of a [`DenseBitSet`].
#[derive(Clone, Debug)]
pub struct DenseBits<'a> {
    words: &'a [u64],
    word: usize,
    cur: u64,
}

impl Iterator for DenseBits<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.cur != 0 {
                let bit = self.cur.trailing_zeros() as usize;
                self.cur &= self.cur - 1;
                return Some(self.word * 64 + bit);
            }
            self.word += 1;
            self.cur = *self.words.get(self.word)?;
        }
    }
}
