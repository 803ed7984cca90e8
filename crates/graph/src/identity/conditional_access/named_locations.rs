use graphid_core::ItemQueryParameters;

use crate::models::NamedLocation;

pub const NAMED_LOCATION_ID: &str = "namedLocation%2Did";

request_builder! {
    /// Provides operations to manage the namedLocations property of the microsoft.graph.conditionalAccessRoot entity.
    NamedLocationsRequestBuilder => "{+baseurl}/identity/conditionalAccess/namedLocations{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get a list of namedLocation objects.
    list(NamedLocation);
    /// Create a new namedLocation object. Named locations can be either
    /// ipNamedLocation or countryNamedLocation objects.
    post(NamedLocation) -> NamedLocation;
}

impl NamedLocationsRequestBuilder {
    pub fn by_named_location_id(&self, id: impl Into<String>) -> NamedLocationItemRequestBuilder {
        self.base.child_with(NAMED_LOCATION_ID, id)
    }

    pub fn count(&self) -> NamedLocationsCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    NamedLocationsCountRequestBuilder => "{+baseurl}/identity/conditionalAccess/namedLocations/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    NamedLocationItemRequestBuilder => "{+baseurl}/identity/conditionalAccess/namedLocations/{namedLocation%2Did}{?%24expand,%24select}";
    /// Retrieve the properties and relationships of a namedLocation object.
    get(ItemQueryParameters) -> NamedLocation;
    /// Update the properties of a namedLocation object. The `@odata.type`
    /// of the existing location must be sent.
    patch(NamedLocation) -> NamedLocation;
    /// Delete a namedLocation object.
    delete;
}
