// dp-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, Mass as UomMass, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

pub mod constants {
    /// Gravity used by the default scene; rounded, not standard gravity.
    pub const G_MPS2: f64 = 9.81;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        use uom::si::{acceleration, length, mass, time};

        assert_eq!(m(2.0).get::<length::meter>(), 2.0);
        assert_eq!(kg(1.5).get::<mass::kilogram>(), 1.5);
        assert_eq!(s(0.01).get::<time::second>(), 0.01);
        assert_eq!(
            mps2(constants::G_MPS2).get::<acceleration::meter_per_second_squared>(),
            9.81
        );
    }

    #[test]
    fn length_converts_across_units() {
        use uom::si::length::centimeter;
        assert!((m(1.0).get::<centimeter>() - 100.0).abs() < 1e-12);
    }
}
