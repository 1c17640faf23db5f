mod day_03;
