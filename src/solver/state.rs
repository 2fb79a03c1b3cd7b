/// A value available for combination together with the expression that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken {
    pub value: u64,
    pub expr: String,
}

impl NumericToken {
    pub fn new(value: u64, expr: String) -> Self {
        Self { value, expr }
    }

    /// Token for one of the source numbers
    pub fn source(value: u64) -> Self {
        Self::new(value, value.to_string())
    }
}

/// Sorted values of a state; states with equal keys are explored once
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(Vec<u64>);

impl CanonicalKey {
    pub fn from_values(mut values: Vec<u64>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }
}

/// One node of the search: the tokens still available and the number of
/// combination steps taken to reach them
#[derive(Debug, Clone)]
pub struct SearchState {
    tokens: Vec<NumericToken>,
    depth: usize,
}

impl SearchState {
    pub fn initial(numbers: &[u64]) -> Self {
        Self {
            tokens: numbers.iter().copied().map(NumericToken::source).collect(),
            depth: 0,
        }
    }

    pub fn tokens(&self) -> &[NumericToken] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn key(&self) -> CanonicalKey {
        CanonicalKey::from_values(self.tokens.iter().map(|t| t.value).collect())
    }

    /// Values left after replacing the tokens at `i` and `j` with `value`
    pub fn values_after(&self, i: usize, j: usize, value: u64) -> Vec<u64> {
        let mut values: Vec<u64> = self
            .tokens
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, t)| t.value)
            .collect();
        values.push(value);
        values
    }

    /// Successor state with the tokens at `i` and `j` replaced by `produced`
    pub fn combine(&self, i: usize, j: usize, produced: NumericToken) -> Self {
        let mut tokens: Vec<NumericToken> = self
            .tokens
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, t)| t.clone())
            .collect();
        tokens.push(produced);

        Self {
            tokens,
            depth: self.depth + 1,
        }
    }
}
