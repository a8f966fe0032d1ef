// hx-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatTransfer as UomHeatTransfer, Length as UomLength, Power as UomPower,
    Ratio as UomRatio, TemperatureInterval as UomTemperatureInterval,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
/// Thermal conductivity `k` [W/(m·K)].
pub type Conductivity = UomThermalConductivity;
/// Convective heat transfer coefficient `h` [W/(m²·K)].
pub type HeatTransferCoeff = UomHeatTransfer;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn w_per_mk(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn w_per_m2k(v: f64) -> HeatTransferCoeff {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransferCoeff::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Typical convection coefficient bands [W/(m²·K)].
pub mod convection {
    /// Free (natural) convection in gases.
    pub const FREE_CONVECTION: (f64, f64) = (5.0, 25.0);
    /// Forced convection in gases.
    pub const FORCED_CONVECTION: (f64, f64) = (25.0, 250.0);

    pub fn is_free_convection(h: f64) -> bool {
        (FREE_CONVECTION.0..=FREE_CONVECTION.1).contains(&h)
    }
}
