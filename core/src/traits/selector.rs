use crate::error::Result;

pub trait Selector {
    /// Lets the operator pick among `names`. Returns one flag per name, in
    /// the same order.
    ///
    /// An empty selection is a valid return; the caller decides whether
    /// that is an error.
    fn select(&self, names: &[String]) -> Result<Vec<bool>>;
}
