/// Number of scalar additions and multiplications performed while answering
/// one query. Every query owns a fresh counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    sums: usize,
    products: usize
}

impl OpCounter {
    pub fn new() -> OpCounter {
        OpCounter { sums: 0, products: 0 }
    }

    #[inline]
    pub fn add_sums(&mut self, n: usize) {
        self.sums += n;
    }

    #[inline]
    pub fn add_products(&mut self, n: usize) {
        self.products += n;
    }

    #[inline]
    pub fn sum_count(&self) -> usize {
        self.sums
    }

    #[inline]
    pub fn product_count(&self) -> usize {
        self.products
    }

    pub fn reset(&mut self) {
        self.sums = 0;
        self.products = 0;
    }
}
