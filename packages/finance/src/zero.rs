pub trait Zero {
    const ZERO: Self;

    fn is_zero(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        self == &Self::ZERO
    }
}

macro_rules! impl_zero {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Zero for $type {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_zero!(u32, u64, u128);
