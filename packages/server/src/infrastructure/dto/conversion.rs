//! Conversion logic between DTOs and domain models.

use qrroom_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    domain::{RoomSummary, RoomValue},
    infrastructure::dto::{
        http::{RoomDetailDto, RoomSummaryDto},
        websocket::RoomEvent,
    },
    usecase::RoomDetail,
};

// ========================================
// Domain Model → DTO
// ========================================

impl From<RoomSummary> for RoomSummaryDto {
    fn from(model: RoomSummary) -> Self {
        Self {
            room_id: model.name.into_string(),
            created_at: timestamp_to_jst_rfc3339(model.created_at.value()),
        }
    }
}

impl From<RoomDetail> for RoomDetailDto {
    fn from(model: RoomDetail) -> Self {
        Self {
            room_id: model.name.into_string(),
            value: model.value.into_string(),
            subscribers: model.client_count,
            created_at: timestamp_to_jst_rfc3339(model.created_at.value()),
        }
    }
}

impl RoomEvent {
    pub fn initial_value(value: RoomValue) -> Self {
        Self::InitialValue {
            value: value.into_string(),
        }
    }

    pub fn value_changed(value: RoomValue) -> Self {
        Self::ValueChanged {
            value: value.into_string(),
        }
    }
}
