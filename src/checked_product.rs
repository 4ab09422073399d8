//! Products over iterators that report overflow instead of wrapping or panicking.

use num_traits::{CheckedMul, One};

/// Multiplies the items of an iterator, returning `None` if any step overflows.
///
/// An empty iterator has a product of one.
pub trait CheckedProduct<T> {
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |product, value| product.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::CheckedProduct;

    #[test]
    fn multiplies_items() {
        assert_eq!([4u16, 5, 6].into_iter().checked_product(), Some(120));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(std::iter::empty::<u64>().checked_product(), Some(1));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!([16u8, 16].into_iter().checked_product(), None);
        assert_eq!([u64::MAX, 2].into_iter().checked_product(), None);
    }

    #[test]
    fn zero_short_of_overflow() {
        assert_eq!([0u8, 200, 200].into_iter().checked_product(), Some(0));
    }
}
