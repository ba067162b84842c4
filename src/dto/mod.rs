pub mod car_dto;
pub mod response;
