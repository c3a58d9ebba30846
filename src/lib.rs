//! NDIS Assist - AI drafting and auditing API for NDIS clinicians
//!
//! Support coordinators and occupational therapists submit structured clinical
//! inputs; the service validates them, scores assistive-technology options
//! locally, prompts a generative model and returns normalized JSON drafts.
//!
//! Layout follows ports and adapters: `domain` holds scoring, prompts and
//! normalization, `application` runs the request pipeline, `ports` and
//! `adapters` connect it to AI vendors, the auth platform and storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
