/// Use cases module containing application business logic orchestration
mod discover_releases;

pub use discover_releases::DiscoverReleasesUseCase;
