//! Buildings, parking, points of interest, transit and weather.

use watapi_core::Response;

use super::{Buildings, Parking, PointsOfInterest, Transit, Weather};
use crate::error::ClientError;

path_segments! {
    /// Kinds of parking lot served under `parking/lots/`.
    MeterType {
        /// Metered lots.
        Meter => "meter",
        /// Permit lots.
        Permit => "permit",
        /// Visitor lots.
        Visitor => "visitor",
        /// Short-term lots.
        Shortterm => "shortterm",
        /// Accessible parking.
        Accessible => "accessible",
        /// Motorcycle parking.
        Motorcycle => "motorcycle",
    }
}

path_segments! {
    /// Points of interest served under `poi/`.
    PoiType {
        /// Automated teller machines.
        Atms => "atms",
        /// Greyhound bus stops.
        Greyhound => "greyhound",
        /// Help lines.
        Helplines => "helplines",
        /// Libraries.
        Libraries => "libraries",
        /// Photosphere locations.
        Photospheres => "photospheres",
        /// Defibrillators.
        Defibrillators => "defibrillators",
        /// Construction sites.
        ConstructionSites => "constructionsites",
        /// Accessible entrances.
        AccessibleEntrances => "accessibleentrances",
        /// Visitor information desks.
        VisitorInformation => "visitorinformation",
    }
}

impl Buildings<'_> {
    /// Every building on campus.
    pub async fn list(self) -> Result<Response, ClientError> {
        self.client.get("buildings/list.json").await
    }

    /// One building by code, e.g. `MC`.
    pub async fn building(self, code: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("buildings/{code}.json")).await
    }

    /// Courses held in a room this term.
    pub async fn room_courses(self, building: &str, room: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("buildings/{building}/{room}/courses.json"))
            .await
    }

    /// Wireless access points in a building.
    pub async fn access_points(self, building: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("buildings/{building}/accesspoints.json"))
            .await
    }

    /// Vending machines in a building.
    pub async fn vending_machines(self, building: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("buildings/{building}/vendingmachines.json"))
            .await
    }
}

impl Parking<'_> {
    /// Live occupancy of the main lots.
    pub async fn watpark(self) -> Result<Response, ClientError> {
        self.client.get("parking/watpark.json").await
    }

    /// Lots of one kind.
    pub async fn lot(self, meter_type: MeterType) -> Result<Response, ClientError> {
        self.client
            .get(&format!("parking/lots/{meter_type}.json"))
            .await
    }
}

impl PointsOfInterest<'_> {
    /// Points of interest of one kind.
    pub async fn list(self, poi_type: PoiType) -> Result<Response, ClientError> {
        self.client.get(&format!("poi/{poi_type}.json")).await
    }
}

impl Transit<'_> {
    /// Grand River Transit agency information.
    pub async fn grt_agencies(self) -> Result<Response, ClientError> {
        self.client.get("transit/grt.json").await
    }

    /// Grand River Transit stops.
    pub async fn grt_stops(self) -> Result<Response, ClientError> {
        self.client.get("transit/grt/stops.json").await
    }
}

impl Weather<'_> {
    /// Latest reading from the campus weather station.
    pub async fn current(self) -> Result<Response, ClientError> {
        self.client.get("weather/current.json").await
    }
}
