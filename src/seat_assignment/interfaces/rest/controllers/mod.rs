pub mod seat_assignment_rest_controller;
