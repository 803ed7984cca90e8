use graphid_core::ItemQueryParameters;

use crate::models::AuthenticationEventListener;

pub const AUTHENTICATION_EVENT_LISTENER_ID: &str = "authenticationEventListener%2Did";

request_builder! {
    /// Provides operations to manage the authenticationEventListeners property of the microsoft.graph.identityContainer entity.
    AuthenticationEventListenersRequestBuilder => "{+baseurl}/identity/authenticationEventListeners{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
    /// Get a list of the authenticationEventListener objects and their properties.
    list(AuthenticationEventListener);
    /// Create a new authenticationEventListener object. The `@odata.type` of
    /// the body selects the listener kind.
    post(AuthenticationEventListener) -> AuthenticationEventListener;
}

impl AuthenticationEventListenersRequestBuilder {
    pub fn by_authentication_event_listener_id(
        &self,
        id: impl Into<String>,
    ) -> AuthenticationEventListenerItemRequestBuilder {
        self.base.child_with(AUTHENTICATION_EVENT_LISTENER_ID, id)
    }

    pub fn count(&self) -> AuthenticationEventListenersCountRequestBuilder {
        self.base.child()
    }
}

request_builder! {
    AuthenticationEventListenersCountRequestBuilder => "{+baseurl}/identity/authenticationEventListeners/$count{?%24filter,%24search}";
    count;
}

request_builder! {
    AuthenticationEventListenerItemRequestBuilder => "{+baseurl}/identity/authenticationEventListeners/{authenticationEventListener%2Did}{?%24expand,%24select}";
    /// Read the properties and relationships of an authenticationEventListener object.
    get(ItemQueryParameters) -> AuthenticationEventListener;
    /// Update the properties of an authenticationEventListener object.
    patch(AuthenticationEventListener) -> AuthenticationEventListener;
    /// Delete an authenticationEventListener object.
    delete;
}
