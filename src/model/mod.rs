/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// HTTP transport abstraction and its reqwest implementation
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response envelopes from API calls
pub mod responses;
/// Date-time wire formatting helpers
pub mod utils;
/// Non-empty request validation
pub mod validation;
