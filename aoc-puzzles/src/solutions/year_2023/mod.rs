mod day_01;
