//! Fixed property ids consumed by the place renderers.
//!
//! These are the standard Wikidata property numbers; renderers request
//! them verbatim from the knowledge-base backend.

use crate::statement::PropertyId;

/// Representative image of the entity.
pub const IMAGE: PropertyId = PropertyId(18);

/// The country a place belongs to.
pub const COUNTRY: PropertyId = PropertyId(17);

/// The continent a country lies on.
pub const CONTINENT: PropertyId = PropertyId(30);

/// Image of the entity's flag.
pub const FLAG_IMAGE: PropertyId = PropertyId(41);

/// Image of the entity's coat of arms.
pub const COAT_OF_ARMS_IMAGE: PropertyId = PropertyId(94);

/// Map image locating the entity.
pub const LOCATOR_MAP_IMAGE: PropertyId = PropertyId(242);

/// Point-in-time qualifier on a statement.
pub const POINT_IN_TIME: PropertyId = PropertyId(585);

/// Number of inhabitants.
pub const POPULATION: PropertyId = PropertyId(1082);

/// Surface area of the entity.
pub const AREA: PropertyId = PropertyId(2046);
