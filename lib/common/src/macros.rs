/// Stamp out one copy of the item `$imp` per float type `$Real`, with `$RealAlias` naming the
/// current type inside it.
///
/// Used for the [Float](crate::Float) impls on `f32` and `f64`; generic code should bound on
/// [Float](crate::Float) instead.
#[macro_export]
macro_rules! item_with {
    {$RealAlias:ident: $($Real:ty),+ => $imp:item} => {
        $(
            const _: () = {
                type $RealAlias = $Real;
                $imp
            };
        )+
    };
}

#[cfg(test)]
mod tests {
    trait Width {
        const BITS: u32;
    }

    item_with! {R: f32, f64 => impl Width for R {
        const BITS: u32 = 8 * std::mem::size_of::<R>() as u32;
    }}

    #[test]
    fn one_impl_per_type() {
        assert_eq!(<f32 as Width>::BITS, 32);
        assert_eq!(<f64 as Width>::BITS, 64);
    }
}
