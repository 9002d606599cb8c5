// Crate-internal.
// ---

pub(crate) mod standard_limits {
    pub(crate) mod limits;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext`.

    pub mod standard_limits {
        pub use crate::impl_ext::standard_limits::limits::*;
    }
}
