macro_rules! u8_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for u8 {
                fn eq(&self, other: &$ty) -> bool {
                    *self == u8::from(*other)
                }
            }

            impl PartialEq<u8> for $ty {
                fn eq(&self, other: &u8) -> bool {
                    u8::from(*self) == *other
                }
            }
        )*
    };
}
