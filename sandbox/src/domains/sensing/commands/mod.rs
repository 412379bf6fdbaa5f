mod deregister_robot;
mod deregister_sensor;
mod register_sensor;
