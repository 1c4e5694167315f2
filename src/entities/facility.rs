use serde::Serialize;

use crate::entities::Coordinate;

pub const FACILITY_LOCATION: Coordinate = Coordinate::new_unchecked(12.9767, 77.5713);

#[derive(Clone, Debug, Serialize)]
pub struct Facility {
    pub name: &'static str,
    pub address: &'static str,
    pub contact: &'static str,
    pub location: Coordinate,
}

pub const E_WASTE_CENTER: Facility = Facility {
    name: "E-Waste Center",
    address: "15th Cross, Bengaluru, Karnataka",
    contact: "080-2222 5555",
    location: FACILITY_LOCATION,
};

/// The crew printed on every receipt.
#[derive(Clone, Debug, Serialize)]
pub struct PickupTeam {
    pub driver_name: &'static str,
    pub contact: &'static str,
    pub vehicle_number: &'static str,
}

pub const PICKUP_TEAM: PickupTeam = PickupTeam {
    driver_name: "Meher Pranav",
    contact: "+91 98765 43210",
    vehicle_number: "KA-05-AB-1234",
};
