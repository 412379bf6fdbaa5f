/// Monotonic id allocator shared by everything that needs a numeric identity.
///
/// Ids start from 1, zero is never handed out.
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }
}
