pub trait Domain {
    type Value: ?Sized;

    fn numel(&self) -> usize;
    /// Position of `value` in the domain, `None` if the value doesn't belong to it
    fn get_index(&self, value: &Self::Value) -> Option<usize>;
    fn get_value(&self, index: usize) -> &Self::Value;
}
