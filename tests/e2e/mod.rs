// End-to-end tests for the talking-head video backend
//
// Each test boots the full router on an ephemeral port and points the provider client at a
// wiremock server standing in for the D-ID talks API. Every context owns its own key pool
// and mock server, so tests run in parallel without sharing rotation state.

mod test_presenters;
mod test_status;
