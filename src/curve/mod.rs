//! secp256k1 field and group arithmetic.
//!
//! Curve parameters are plain `const` values (see [`SECP256K1`]); there is
//! no mutable global state anywhere in this module.

pub mod point;

pub use point::Point;

use crate::error::CoreError;
use crate::primitives::U256;
use crate::primitives::modular::{mod_add, mod_inv, mod_mul, mod_sub};

/// `y² = x³ + a·x + b (mod p)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldParams {
    pub p: U256,
    pub a: U256,
    pub b: U256,
}

/// The curve's generator point and the order of the group it generates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    pub g: Point,
    pub n: U256,
}

/// secp256k1's field parameters: `p = 2²⁵⁶ − 2³² − 977`, `a = 0`, `b = 7`.
pub const FIELD: FieldParams = FieldParams {
    p: U256::from_be_bytes([
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff,
        0xfc, 0x2f,
    ]),
    a: U256::ZERO,
    b: U256::from_be_bytes([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 7,
    ]),
};

const GX: U256 = U256::from_be_bytes([
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
]);

const GY: U256 = U256::from_be_bytes([
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
]);

/// secp256k1's standard generator and group order.
pub const SECP256K1: Generator = Generator {
    g: Point::Affine { x: GX, y: GY },
    n: U256::from_be_bytes([
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ]),
};

/// Returns `true` iff `(x, y)` satisfies `y² ≡ x³ + a·x + b (mod p)`.
pub fn is_on_curve(x: U256, y: U256, field: &FieldParams) -> bool {
    let y2 = mod_mul(y, y, field.p);
    let x3 = mod_mul(mod_mul(x, x, field.p), x, field.p);
    let ax = mod_mul(field.a, x, field.p);
    let rhs = mod_add(mod_add(x3, ax, field.p), field.b, field.p);

    y2 == rhs
}

/// Adds two points on the curve, following the standard group law.
pub fn point_add(p: Point, q: Point, field: &FieldParams) -> Point {
    let (px, py) = match p {
        Point::Infinity => return q,
        Point::Affine { x, y } => (x, y),
    };
    let (qx, qy) = match q {
        Point::Infinity => return p,
        Point::Affine { x, y } => (x, y),
    };

    if px == qx {
        if py != qy || py.is_zero() {
            return Point::Infinity;
        }

        // Doubling: slope = (3x²) / (2y).
        let three_x2 = mod_mul(U256::from(3u8), mod_mul(px, px, field.p), field.p);
        let two_y = mod_mul(U256::from(2u8), py, field.p);
        let slope = mod_mul(three_x2, mod_inv(two_y, field.p), field.p);

        let xr = mod_sub(mod_sub(mod_mul(slope, slope, field.p), px, field.p), qx, field.p);
        let yr = mod_sub(mod_mul(slope, mod_sub(px, xr, field.p), field.p), py, field.p);

        return Point::Affine { x: xr, y: yr };
    }

    // General case: slope = (yP - yQ) / (xP - xQ).
    let slope = mod_mul(
        mod_sub(py, qy, field.p),
        mod_inv(mod_sub(px, qx, field.p), field.p),
        field.p,
    );

    let xr = mod_sub(mod_sub(mod_mul(slope, slope, field.p), px, field.p), qx, field.p);
    let yr = mod_sub(mod_mul(slope, mod_sub(px, xr, field.p), field.p), py, field.p);

    Point::Affine { x: xr, y: yr }
}

/// Double-and-add scalar multiplication: `k·p`. `k` is taken by value and
/// consumed one bit at a time, never mutating a caller-owned scalar.
pub fn scalar_mul(mut k: U256, mut p: Point, field: &FieldParams) -> Point {
    let mut r = Point::Infinity;

    while !k.is_zero() {
        if k.bit(0) {
            r = point_add(r, p, field);
        }
        p = point_add(p, p, field);
        k = k.shr1();
    }

    r
}

/// Multiplies the curve's own generator by `k`, rejecting scalars outside
/// `[1, n)` up front rather than letting an out-of-range or zero scalar
/// silently produce the point at infinity.
pub fn scalar_base_mul(k: U256, r#gen: &Generator) -> Result<Point, CoreError> {
    if k.is_zero() || k >= r#gen.n {
        return Err(CoreError::InvalidScalar);
    }

    Ok(scalar_mul(k, r#gen.g, &FIELD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        let Point::Affine { x, y } = SECP256K1.g else {
            panic!("generator must be affine");
        };
        assert!(is_on_curve(x, y, &FIELD));
    }

    #[test]
    fn scalar_mul_by_one_is_identity() {
        let p = scalar_mul(U256::ONE, SECP256K1.g, &FIELD);
        assert_eq!(p, SECP256K1.g);
    }

    #[test]
    fn scalar_mul_by_zero_is_infinity() {
        let p = scalar_mul(U256::ZERO, SECP256K1.g, &FIELD);
        assert_eq!(p, Point::Infinity);
    }

    #[test]
    fn doubling_matches_self_addition() {
        let doubled = point_add(SECP256K1.g, SECP256K1.g, &FIELD);
        let via_scalar = scalar_mul(U256::from(2u8), SECP256K1.g, &FIELD);
        assert_eq!(doubled, via_scalar);
    }

    #[test]
    fn scalar_products_satisfy_group_law() {
        let a = U256::from(7u64);
        let b = U256::from(13u64);

        let lhs = point_add(
            scalar_mul(a, SECP256K1.g, &FIELD),
            scalar_mul(b, SECP256K1.g, &FIELD),
            &FIELD,
        );
        let rhs = scalar_mul(a + b, SECP256K1.g, &FIELD);

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn products_of_generator_are_on_curve() {
        for k in [1u64, 2, 3, 17, 12345] {
            let Point::Affine { x, y } = scalar_mul(U256::from(k), SECP256K1.g, &FIELD) else {
                panic!("k*G should not be infinity for small nonzero k");
            };
            assert!(is_on_curve(x, y, &FIELD));
        }
    }

    #[test]
    fn scalar_base_mul_rejects_zero_and_out_of_range() {
        assert_eq!(scalar_base_mul(U256::ZERO, &SECP256K1), Err(CoreError::InvalidScalar));
        assert_eq!(scalar_base_mul(SECP256K1.n, &SECP256K1), Err(CoreError::InvalidScalar));
    }
}
