/// Create a keycode. For example, `k!(A)` represents `KeyCode::A`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::keycode::KeyCode::$k
    };
}

/// Create an ErgoDox layer from the spatial layout of the keys.
///
/// Keys are written the way the keyboard looks: the left hand rows, the left thumb cluster
/// (top row, then the middle key, then the bottom row), the right hand rows and the right thumb cluster.
/// The result is in matrix order, 14 rows of 6 columns. Matrix positions without a switch are `No`.
#[macro_export]
macro_rules! ergodox_layer {
    (
        // left hand
        $k00:ident, $k01:ident, $k02:ident, $k03:ident, $k04:ident, $k05:ident, $k06:ident,
        $k10:ident, $k11:ident, $k12:ident, $k13:ident, $k14:ident, $k15:ident, $k16:ident,
        $k20:ident, $k21:ident, $k22:ident, $k23:ident, $k24:ident, $k25:ident,
        $k30:ident, $k31:ident, $k32:ident, $k33:ident, $k34:ident, $k35:ident, $k36:ident,
        $k40:ident, $k41:ident, $k42:ident, $k43:ident, $k44:ident,
                                                        $k55:ident, $k56:ident,
                                                                    $k54:ident,
                                            $k53:ident, $k52:ident, $k51:ident,
        // right hand
        $k07:ident, $k08:ident, $k09:ident, $k0A:ident, $k0B:ident, $k0C:ident, $k0D:ident,
        $k17:ident, $k18:ident, $k19:ident, $k1A:ident, $k1B:ident, $k1C:ident, $k1D:ident,
                    $k28:ident, $k29:ident, $k2A:ident, $k2B:ident, $k2C:ident, $k2D:ident,
        $k37:ident, $k38:ident, $k39:ident, $k3A:ident, $k3B:ident, $k3C:ident, $k3D:ident,
                                $k49:ident, $k4A:ident, $k4B:ident, $k4C:ident, $k4D:ident,
        $k57:ident, $k58:ident,
        $k59:ident,
        $k5C:ident, $k5B:ident, $k5A:ident $(,)?
    ) => {
        [
            [$crate::k!($k00), $crate::k!($k10), $crate::k!($k20), $crate::k!($k30), $crate::k!($k40), $crate::k!(No)],
            [$crate::k!($k01), $crate::k!($k11), $crate::k!($k21), $crate::k!($k31), $crate::k!($k41), $crate::k!($k51)],
            [$crate::k!($k02), $crate::k!($k12), $crate::k!($k22), $crate::k!($k32), $crate::k!($k42), $crate::k!($k52)],
            [$crate::k!($k03), $crate::k!($k13), $crate::k!($k23), $crate::k!($k33), $crate::k!($k43), $crate::k!($k53)],
            [$crate::k!($k04), $crate::k!($k14), $crate::k!($k24), $crate::k!($k34), $crate::k!($k44), $crate::k!($k54)],
            [$crate::k!($k05), $crate::k!($k15), $crate::k!($k25), $crate::k!($k35), $crate::k!(No), $crate::k!($k55)],
            [$crate::k!($k06), $crate::k!($k16), $crate::k!(No), $crate::k!($k36), $crate::k!(No), $crate::k!($k56)],
            [$crate::k!($k07), $crate::k!($k17), $crate::k!(No), $crate::k!($k37), $crate::k!(No), $crate::k!($k57)],
            [$crate::k!($k08), $crate::k!($k18), $crate::k!($k28), $crate::k!($k38), $crate::k!(No), $crate::k!($k58)],
            [$crate::k!($k09), $crate::k!($k19), $crate::k!($k29), $crate::k!($k39), $crate::k!($k49), $crate::k!($k59)],
            [$crate::k!($k0A), $crate::k!($k1A), $crate::k!($k2A), $crate::k!($k3A), $crate::k!($k4A), $crate::k!($k5A)],
            [$crate::k!($k0B), $crate::k!($k1B), $crate::k!($k2B), $crate::k!($k3B), $crate::k!($k4B), $crate::k!($k5B)],
            [$crate::k!($k0C), $crate::k!($k1C), $crate::k!($k2C), $crate::k!($k3C), $crate::k!($k4C), $crate::k!($k5C)],
            [$crate::k!($k0D), $crate::k!($k1D), $crate::k!($k2D), $crate::k!($k3D), $crate::k!($k4D), $crate::k!(No)],
        ]
    };
}
