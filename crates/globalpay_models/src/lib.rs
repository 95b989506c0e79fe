//! Wire format and SDK facing types for the GP API stored payment method
//! endpoints: tokenization request bodies, report and detail responses, the
//! standard error envelope, and the typed records client code works with.

pub mod custom_serde;
pub mod enums;
pub mod payment_methods;
pub mod requests;
pub mod response;
