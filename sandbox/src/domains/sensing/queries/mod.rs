mod find_sensor;
mod get_sensor;
