mod certificate_service;

pub use certificate_service::CertificateService;
